//! 明暗主题
//!
//! 当前主题作用于整个文档（DaisyUI 的 `data-theme`），也传给嵌入的分析图表。

use crate::web::browser::apply_document_theme;
use leptos::prelude::*;
use shortdash::analytics::ThemeMode;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ThemeMode>,
    set_mode: WriteSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_mode.update(|m| *m = m.toggle());
    }
}

pub fn provide_theme() -> ThemeContext {
    let (mode, set_mode) = signal(ThemeMode::default());

    Effect::new(move |_| {
        apply_document_theme(mode.get().as_str());
    });

    let ctx = ThemeContext { mode, set_mode };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

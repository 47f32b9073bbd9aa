pub mod mocks;

use std::cell::Cell;
use std::rc::Rc;

use dioxus::dioxus_core::{ NoOpMutations, VirtualDom };
use dioxus::prelude::*;

use crate::components::ThemeToggle;
use crate::configs::ThemeConfig;
use crate::utils::{ use_theme_provider_with, Theme, ThemeContext };
use mocks::MemoryRoot;

pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Props, Clone)]
pub struct ThemeAppProps {
    config: ThemeConfig,
    root: MemoryRoot,
    context: Rc<Cell<Option<ThemeContext>>>,
}

impl PartialEq for ThemeAppProps {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.root.same_as(&other.root) && Rc::ptr_eq(&self.context, &other.context)
    }
}

fn theme_app(props: ThemeAppProps) -> Element {
    let root = props.root.clone();
    let theme = use_theme_provider_with(props.config, move || root);
    props.context.set(Some(theme));

    rsx! {
        ThemeToggle {}
    }
}

/// The theme provider and toggle mounted in a headless `VirtualDom` over a
/// shared `MemoryRoot`.
pub struct ThemeApp {
    dom: VirtualDom,
    pub root: MemoryRoot,
    context: Rc<Cell<Option<ThemeContext>>>,
}

#[allow(dead_code)]
impl ThemeApp {
    pub fn mount() -> Self {
        Self::mount_with(ThemeConfig::default(), MemoryRoot::new())
    }

    pub fn mount_with(config: ThemeConfig, root: MemoryRoot) -> Self {
        setup();
        let context = Rc::new(Cell::new(None));
        let props = ThemeAppProps { config, root: root.clone(), context: context.clone() };
        let mut dom = VirtualDom::new_with_props(theme_app, props);
        dom.rebuild_in_place();

        let mut app = Self { dom, root, context };
        app.settle();
        app
    }

    /// Runs pending renders, tasks and effects until the dom is idle.
    pub fn settle(&mut self) {
        for _ in 0..16 {
            self.dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn context(&self) -> ThemeContext {
        self.context.get().expect("theme provider not mounted")
    }

    pub fn set_dark(&mut self, value: bool) {
        let theme = self.context();
        self.dom.in_runtime(|| theme.set_dark(value));
        self.settle();
    }

    pub fn toggle(&mut self) {
        let theme = self.context();
        self.dom.in_runtime(|| theme.toggle());
        self.settle();
    }

    pub fn is_dark(&self) -> bool {
        let theme = self.context();
        self.dom.in_runtime(|| theme.is_dark())
    }

    pub fn theme(&self) -> Theme {
        let theme = self.context();
        self.dom.in_runtime(|| theme.theme())
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn assert_consistent(&self) {
        assert_eq!(
            self.is_dark(),
            self.root.present(),
            "state is_dark={} but root flag present={}",
            self.is_dark(),
            self.root.present()
        );
    }
}

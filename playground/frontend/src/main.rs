use hyperwalk::platform::browser::{
    BrowserFetcher, BrowserHistory, MenuItems, PopstateListener, SceneMount, init_logger,
    navigate_handler, restore_from_address,
};
use hyperwalk::renderer::{menu_bar, scene_pane};
use hyperwalk::zoon::{eprintln, *};
use hyperwalk::{ContentView, NavigationMenu, ViewerConfig, tracing};

fn main() {
    console_error_panic_hook::set_once();
    init_logger(tracing::Level::INFO);
    start_app("app", Viewer::new);
}

struct Viewer {
    view: ContentView,
    content: SceneMount,
    menu_items: MenuItems,
    _popstate: Option<PopstateListener>,
}

impl Viewer {
    fn new() -> impl Element {
        let mut config = ViewerConfig::from_build_env();
        if let Err(error) = config.validate() {
            eprintln!("Invalid viewer configuration, using defaults: {error}");
            config = ViewerConfig::default();
        }

        let content = SceneMount::new();
        let view = ContentView::with_address_prefix(
            config.address_prefix.clone(),
            content.clone(),
            BrowserFetcher::new(),
            BrowserHistory::new(),
        );

        let menu_items = MenuItems::new();
        let menu = NavigationMenu::new(
            view.clone(),
            menu_items.clone(),
            BrowserFetcher::new(),
            config.api_root.clone(),
        );
        Task::start(async move {
            // Failure is already on the menu mount.
            let _ = menu.init().await;
        });

        let popstate = match PopstateListener::attach(&view) {
            Ok(listener) => Some(listener),
            Err(error) => {
                eprintln!("Back/forward navigation unavailable: {error:?}");
                None
            }
        };
        restore_from_address(&view);

        Self {
            view,
            content,
            menu_items,
            _popstate: popstate,
        }
        .root()
    }

    fn root(self) -> impl Element {
        let on_navigate = navigate_handler(&self.view);
        Column::new()
            .s(Width::fill())
            .s(Padding::new().x(16).y(12))
            .s(Gap::new().y(16))
            .item(
                El::with_tag(Tag::Nav)
                    .update_raw_el(|raw_el| raw_el.attr("class", "navbar"))
                    .child(menu_bar(
                        self.menu_items.items_vec(),
                        self.menu_items.error(),
                        on_navigate.clone(),
                    )),
            )
            .item(scene_pane(self.content.nodes_vec(), on_navigate))
            .after_remove(move |_| drop(self._popstate))
    }
}

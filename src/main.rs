use encoder_popup::{logging, ui::app::App};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}

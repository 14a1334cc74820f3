//! CSR entry point: installs the panic hook and console logger, then
//! mounts [`App`](aicook_ui::app::App) onto the document body.

use aicook_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(App);
}

use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the config watcher on its own thread so the GTK main loop stays free.
pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            let watcher = tokio::spawn(crate::config::run_async_watcher(tx));
            if let Err(e) = watcher.await {
                log::error!("Config watcher stopped: {}", e);
            }
        });
    });
}

mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod frontend;
mod metadata;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod particles;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scroll_spy;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

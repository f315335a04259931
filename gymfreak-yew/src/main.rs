use gymfreak_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Gym Freak");

    yew::Renderer::<App>::new().render();
}

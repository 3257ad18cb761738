use layout_builder::{
    config::OutputConfig,
    keyboard::render,
    renderer::{Codegen, ImageState, RasterRenderer, Renderer},
    Result,
};

mod layout;

use layout::{DESCRIPTOR, LAYOUT};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OutputConfig::from_env();
    log::info!(
        "Building layout {} into {}",
        DESCRIPTOR.name,
        config.out_dir.display()
    );

    for state in ImageState::ALL {
        let mut renderer = RasterRenderer::new(DESCRIPTOR, state, config.clone());
        renderer.fill(state.palette().background);
        render(&LAYOUT, &mut renderer);
        renderer.write()?;
    }

    let mut codegen = Codegen::new(DESCRIPTOR, config);
    render(&LAYOUT, &mut codegen);
    log::debug!("{} inputs", codegen.inputs().len());
    codegen.write()
}

use clap::Parser;
use escape_time_canvas::{CliArgs, CliRenderController, CliRequest, PngFilePresenter, PngSequenceSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let request = CliArgs::parse().into_request()?;
    let mut controller = CliRenderController::new(PngFilePresenter::new());

    match request {
        CliRequest::Still { config, output } => {
            controller.generate(&config);
            controller.write(&output)?;
            info!(path = %output.display(), "wrote fractal");
        }
        CliRequest::Animation {
            config,
            settings,
            frames,
            output_dir,
        } => {
            let sink = PngSequenceSink::new(&output_dir)?;
            let (sink, rendered) = controller.animate(config, settings, sink, frames)?;
            info!(
                rendered,
                directory = %sink.directory().display(),
                "wrote animation frames"
            );
        }
    }

    Ok(())
}

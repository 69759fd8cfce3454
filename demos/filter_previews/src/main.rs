use std::path::PathBuf;

use argh::FromArgs;

use filterer::imgproc::FilterPipeline;
use filterer::io::functional as F;

#[derive(FromArgs, Debug)]
/// Render the default preview of every filter.
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// directory where the previews are written
    #[argh(option, short = 'o')]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = F::read_image_rgba8(&args.input)?;
    std::fs::create_dir_all(&args.output_dir)?;

    F::write_image_png(args.output_dir.join("None.png"), &image)?;

    for (kind, preview) in FilterPipeline::default().filter_previews(&image) {
        let path = args.output_dir.join(format!("{kind}.png"));
        F::write_image_png(&path, &preview)?;
        log::info!(
            "{} (parameter {}) -> {}",
            kind,
            kind.range().default,
            path.display()
        );
    }

    println!(
        "🚀 wrote previews of {} to {}",
        image.size(),
        args.output_dir.display()
    );

    Ok(())
}

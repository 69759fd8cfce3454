use std::path::PathBuf;

use argh::FromArgs;

use filterer::imgproc::{ExecutionStrategy, FilterKind, FilterPipeline, FilterStep};
use filterer::io::functional as F;

#[derive(FromArgs, Debug)]
/// Apply filters to an image and save the result as PNG.
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output PNG image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// filter step as kind=value or a bare kind for its default, repeat to chain
    #[argh(option, short = 'f')]
    filter: Vec<FilterStep>,

    /// path to a JSON file with a list of {"kind", "parameter"} steps, applied after -f
    #[argh(option, short = 'r')]
    recipe: Option<PathBuf>,

    /// run every pass on the current thread
    #[argh(switch)]
    serial: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut steps = args.filter;
    if let Some(recipe) = &args.recipe {
        let recipe: Vec<FilterStep> = serde_json::from_slice(&std::fs::read(recipe)?)?;
        steps.extend(recipe);
    }

    let available = FilterKind::ALL.map(|k| k.name()).join(", ");
    log::debug!("available filters: {available}");

    if steps.is_empty() {
        log::warn!("no filters given, the image is written unchanged");
    }

    for step in &steps {
        if !step.kind.range().contains(step.parameter) {
            let range = step.kind.range();
            log::warn!(
                "{} is outside the [{}, {}] range of {}, the filter will clamp it",
                step.parameter,
                range.min,
                range.max,
                step.kind
            );
        }
    }

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::default()
    };

    let image = F::read_image_rgba8(&args.input)?;
    log::info!("read {} from {}", image.size(), args.input.display());

    let filtered = FilterPipeline::new(strategy).apply_filters_in_order(&image, &steps);

    println!(
        "average rgb: ({}, {}, {}) -> ({}, {}, {})",
        image.avg_red(),
        image.avg_green(),
        image.avg_blue(),
        filtered.avg_red(),
        filtered.avg_green(),
        filtered.avg_blue()
    );

    F::write_image_png(&args.output, &filtered)?;
    log::info!(
        "wrote {} filtered with {} to {}",
        filtered.size(),
        steps
            .iter()
            .map(FilterStep::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        args.output.display()
    );

    Ok(())
}

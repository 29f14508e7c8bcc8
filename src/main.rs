#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(
    name = "avro2es",
    about = "Convert an Avro schema to an Elasticsearch mapping"
)]
struct Cli {
    /// Path or URL to the Avro schema (.avsc)
    #[arg(value_name = "AVSC")]
    input: String,

    /// Path to the mapping output file (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<std::path::PathBuf>,

    /// Write compact JSON instead of indented JSON
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// `ignore_above` for keyword fields
    #[arg(long, value_name = "N", default_value_t = avro2es::mapping::options::KEYWORD_IGNORE_ABOVE)]
    ignore_above: u32,

    /// Emit arrays and unions of primitives as plain leaf fields
    #[arg(long, default_value_t = false)]
    no_wrap_collections: bool,
}

#[cfg(feature = "cli")]
fn main() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    #[cfg(feature = "trace")]
    let fmt_layer = fmt_layer.with_span_events(
        tracing_subscriber::fmt::format::FmtSpan::ENTER
            | tracing_subscriber::fmt::format::FmtSpan::EXIT,
    );
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    let cli = Cli::parse();

    let translator = avro2es::converter::MappingTranslator::default()
        .with_keyword_ignore_above(cli.ignore_above)
        .with_wrap_collections(!cli.no_wrap_collections);

    if let Err(e) = run(&cli, &translator) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli, translator: &avro2es::converter::MappingTranslator) -> avro2es::Result<()> {
    let pretty = !cli.compact;
    let mapping = avro2es::converter::convert_avro_to_es(
        &cli.input,
        cli.output.as_deref(),
        translator,
        pretty,
    )?;

    if cli.output.is_none() {
        let json = if pretty {
            mapping.to_json_pretty()?
        } else {
            mapping.to_json()?
        };
        println!("{json}");
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}

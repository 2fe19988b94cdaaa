use clap::Parser;
use panel_links::domain::model::LinkModel;
use panel_links::utils::{logger, validation::Validate};
use panel_links::{
    get_field_links_supplier, get_panel_links_supplier, CliConfig, LinkError, LinkModelSupplier,
    LinkTargetKind, PreviewConfig,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match PreviewConfig::from_file(&cli.config).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match resolve_links(&cli, &config) {
        Ok(None) => println!("no links configured"),
        Ok(Some(links)) => print_links(&links, cli.json)?,
        Err(e) => {
            tracing::error!("❌ Link resolution failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(if e.is_config_error() { 1 } else { 2 });
        }
    }

    Ok(())
}

fn resolve_links(
    cli: &CliConfig,
    config: &PreviewConfig,
) -> Result<Option<Vec<LinkModel>>, LinkError> {
    let renderer = config.renderer()?;

    match cli.target {
        LinkTargetKind::Panel => {
            let panel = config.panel_model()?;
            get_panel_links_supplier(panel, &renderer)
                .map(|supplier| supplier.get_links())
                .transpose()
        }
        LinkTargetKind::Field => {
            let value = config.field_display()?;
            let compare = config.compare_view();
            get_field_links_supplier(&value, compare.as_ref(), &renderer)
                .map(|supplier| supplier.get_links())
                .transpose()
        }
    }
}

fn print_links(links: &[LinkModel], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(links)?);
        return Ok(());
    }

    for link in links {
        println!("🔗 {} -> {}", link.title, link.href);
    }
    Ok(())
}

use anyhow::Result;
use panel_links::utils::validation::Validate;
use panel_links::{
    get_field_links_supplier, get_panel_links_supplier, LinkError, LinkModelSupplier,
    PreviewConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

const PREVIEW: &str = r#"
[renderer]
base_url = "https://grafana.example.com"

[panel]
id = 4
title = "Checkout latency"

[[panel.links]]
title = "Service overview"
url = "/d/svc?var-service=${service}"

[panel.scoped_vars.service]
text = "service"
value = "checkout"

[[frames]]
name = "latency"
ref_id = "A"
exemplars = [["traceId:7f3a"], ["traceId:9c1e;note"]]

[frames.labels]
service = "checkout"

[[frames.fields]]
name = "time"
type = "time"
values = [1700000000000, 1700000060000]

[[frames.fields]]
name = "p95"
type = "number"
values = [120, 180]

[[frames.fields.config.links]]
title = "Trace ${__value.exemplar.traceId}"
url = "/explore?trace=${__value.exemplar.traceId}&series=${__series.name}&field=${__field.name}"
target_blank = true

[[frames.fields.config.links]]
title = "Value"
url = "/v?raw=${__value.raw}&text=${__value.text:percentencode}"

[[frames]]
name = "latency_baseline"
exemplars = [["traceId:0001"], ["traceId:0002"]]

[display]
frame = 0
compare_frame = 1
col = 1
row = 1
name = "p95"
numeric = 180.0
text = "180 ms"
"#;

fn write_preview(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_field_links_from_preview_file() -> Result<()> {
    let file = write_preview(PREVIEW)?;
    let config = PreviewConfig::from_file(file.path())?;
    config.validate()?;

    let renderer = config.renderer()?;
    let value = config.field_display()?;
    let compare = config.compare_view();

    let links = get_field_links_supplier(&value, compare.as_ref(), &renderer)
        .expect("column has links")
        .get_links()?;

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].title, "Trace 09c1e");
    assert_eq!(
        links[0].href,
        "https://grafana.example.com/explore?trace=09c1e&series=latency&field=p95"
    );
    assert_eq!(
        links[1].href,
        "https://grafana.example.com/v?raw=180&text=180+ms"
    );
    Ok(())
}

#[test]
fn test_panel_links_from_preview_file() -> Result<()> {
    let config = PreviewConfig::from_toml_str(PREVIEW)?;
    let renderer = config.renderer()?;
    let panel = config.panel_model()?;

    let links = get_panel_links_supplier(panel, &renderer)
        .expect("panel has links")
        .get_links()?;

    assert_eq!(links.len(), 1);
    assert_eq!(
        links[0].href,
        "https://grafana.example.com/d/svc?var-service=checkout"
    );
    Ok(())
}

#[test]
fn test_calculated_value_uses_display_links() -> Result<()> {
    let content = r#"
[[frames]]
name = "cpu"

[display]
frame = 0
name = "Mean"
numeric = 0.25
text = "25%"

[[display.links]]
title = "${__value.calculationName}"
url = "/d/cpu?value=${__value.numeric}"
"#;
    let config = PreviewConfig::from_toml_str(content)?;
    config.validate()?;
    let renderer = config.renderer()?;
    let value = config.field_display()?;

    let links = get_field_links_supplier(&value, None, &renderer)
        .expect("display has links")
        .get_links()?;

    assert_eq!(links[0].title, "Mean");
    assert_eq!(links[0].href, "/d/cpu?value=0.25");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PreviewConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, LinkError::IoError(_)));
    assert!(err.is_config_error());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = PreviewConfig::from_toml_str("[panel\nid = 1").unwrap_err();
    assert!(matches!(err, LinkError::ConfigParseError { .. }));
}

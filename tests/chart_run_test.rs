use anyhow::Result;
use metacritic_charts::app::chart_use_case::ChartUseCase;
use metacritic_charts::config::{ChartsConfig, Layout};
use metacritic_charts::error::{ChartError, LoadError};
use metacritic_charts::pipeline::JsonGameSource;
use metacritic_charts::render::SvgChartRenderer;
use serde_json::json;
use std::sync::Arc;
use tempfile::tempdir;

fn use_case() -> ChartUseCase {
    ChartUseCase::new(Arc::new(JsonGameSource::new()), Arc::new(SvgChartRenderer))
}

#[tokio::test]
async fn test_render_bar_chart_from_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let data_path = temp_dir.path().join("metacritic_games.json");
    let data = json!([
        {"name": "Celeste", "platform": "Switch", "publisher": "Nintendo", "release_date": "Jan 25, 2018",
         "metascore": 94, "user_score": 8.9, "user_positive": 200, "user_negative": 5, "user_neutral": 10},
        {"name": "Mega Man 11", "platform": "PS4", "publisher": "Capcom", "release_date": "Oct 2, 2018",
         "metascore": 80, "user_score": "7.9", "user_positive": 40, "user_negative": 3, "user_neutral": 2},
        {"name": "Starlink", "platform": "XONE", "publisher": "Ubisoft", "release_date": "Oct 16, 2018",
         "metascore": 78, "user_positive": 5, "user_negative": 1, "user_neutral": 1},
        {"name": "The Quiet Man", "platform": "PS4", "publisher": "Square Enix", "release_date": "Nov 1, 2018",
         "metascore": 29, "user_positive": 30, "user_negative": 300, "user_neutral": 15}
    ]);
    std::fs::write(&data_path, serde_json::to_vec(&data)?)?;

    let config = ChartsConfig::builtin();
    let variant = config.variant("bar")?;
    let result = use_case()
        .run(variant, data_path.to_str().unwrap())
        .await?;

    assert_eq!(result.total_records, 4);
    assert_eq!(result.displayed, 2);
    assert!(result.svg.contains("Celeste"));
    assert!(result.svg.contains("Mega Man 11"));
    assert!(!result.svg.contains("Starlink"));
    assert!(!result.svg.contains("The Quiet Man"));
    Ok(())
}

#[tokio::test]
async fn test_render_bubble_chart_from_toml_variant() -> Result<()> {
    let temp_dir = tempdir()?;
    let data_path = temp_dir.path().join("games.json");
    let data = json!([
        {"name": "Hades", "platform": "PC", "publisher": "Supergiant", "release_date": "Sep 17, 2020", "metascore": 93},
        {"name": "Celeste", "platform": "PC", "publisher": "Matt Makes Games", "release_date": "Jan 25, 2018", "metascore": 92},
        {"name": "Bastion", "platform": "PC", "publisher": "Supergiant", "release_date": "Aug 16, 2011", "metascore": 86}
    ]);
    std::fs::write(&data_path, serde_json::to_vec(&data)?)?;

    let config = ChartsConfig::from_toml_str(&format!(
        r#"
        [[variants]]
        name = "supergiant"
        kind = "bubble"
        title = "Supergiant Games"
        data = "{}"
        cutoff_year = 2015
        publishers = ["Supergiant"]
        color_by = "score"

        [variants.layout]
        width = 400
        height = 400
        padding = 4
        "#,
        data_path.display()
    ))?;
    let variant = config.variant("supergiant")?;
    assert_eq!(variant.layout(), Layout { width: 400, height: 400, margin: 0, padding: 4 });

    let result = use_case().run(variant, &variant.data).await?;
    assert_eq!(result.displayed, 1);
    assert!(result.svg.contains("Hades"));
    assert!(result.svg.contains("Supergiant Games"));
    assert!(!result.svg.contains("Bastion"));
    Ok(())
}

#[tokio::test]
async fn test_empty_display_set_still_renders() -> Result<()> {
    let temp_dir = tempdir()?;
    let data_path = temp_dir.path().join("games.json");
    std::fs::write(&data_path, "[]")?;

    let config = ChartsConfig::builtin();
    let result = use_case()
        .run(config.variant("bar")?, data_path.to_str().unwrap())
        .await?;
    assert_eq!(result.displayed, 0);
    assert!(result.svg.contains("<svg"));
    Ok(())
}

#[tokio::test]
async fn test_missing_data_file_is_load_error() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let config = ChartsConfig::builtin();
    let err = use_case()
        .run(config.variant("bubble").unwrap(), missing.to_str().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ChartError::Load(LoadError::Io { .. })));
}

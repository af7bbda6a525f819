use anyhow::Result;
use log::info;
use std::fs;
use std::path::Path;

use componentgpt::{
    ComponentGenerator,
    DesignTool,
    DocumentDesignTool,
    GeneratorConfig,
    OpenAiClient,
};

use crate::cli::commands::resolve_api_key;
use crate::cli::ui;

/// Generate code for the first selected node of a design document
pub async fn execute(
    config: &GeneratorConfig,
    document: &Path,
    framework: Option<&str>,
    api_key: Option<&str>,
    output_dir: Option<&Path>,
    codegen: bool
) -> Result<()> {
    let tool = DocumentDesignTool::from_file(document)?;
    if !codegen {
        ui::print_info(&format!("Loaded {}", document.display()));
    }
    let framework = framework.unwrap_or(config.default_framework.as_str());
    let api_key = resolve_api_key(config, api_key).await?;

    let client = OpenAiClient::new(&config.api)?;
    let generator = ComponentGenerator::new(client, config.api.clone(), config.generation_options());

    if !codegen {
        ui::print_header("Generating Component Code");
        ui::print_result("Framework", framework);
    }

    let spinner = (!codegen).then(|| ui::spinner_with_message("Waiting for the model..."));
    let outcome = generator.generate(&tool, framework, &api_key).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            ui::print_error(&e.user_message());
            return Err(e.into());
        }
    };

    let artifacts = result.artifacts();
    if codegen {
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        for artifact in &artifacts {
            ui::display_artifact(artifact);
        }
    }

    if let Some(output_dir) = output_dir {
        let name = tool
            .current_selection()
            .first()
            .map(|node| node.name.clone())
            .unwrap_or_else(|| "component".to_string());

        let project_dir = output_dir.join(
            format!("{}_{}", name.replace(['/', '\\', ' '], "_"), chrono::Utc::now().timestamp())
        );
        fs::create_dir_all(&project_dir)?;

        for (file_name, contents) in result.files(&name) {
            let path = project_dir.join(file_name);
            fs::write(&path, contents)?;
            info!("Wrote {}", path.display());
        }
        ui::print_success(&format!("Generated files saved to {}", project_dir.display()));
    }

    Ok(())
}

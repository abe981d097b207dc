use anyhow::{anyhow, Result};
use lpgen_client::{validate_prompt, GenerateOutcome, PathClient, UNEXPECTED_FORMAT_MSG};
use lpgen_config::Config;
use lpgen_core::LearningPath;
use lpgen_graph::Roadmap;
use tracing::info;

#[allow(clippy::too_many_arguments)]
pub async fn handle_generate(
    config: &Config,
    prompt: &str,
    user: Option<&str>,
    mermaid: bool,
    json: bool,
    save: bool,
    raw: bool,
) -> Result<()> {
    if let Some(msg) = validate_prompt(prompt) {
        return Err(anyhow!(msg));
    }

    let client = PathClient::new(&config.api)?;
    let user = user.or(config.api.user_id.as_deref());

    println!("Generating learning path...");
    let outcome = client.generate(prompt, user).await?;

    let (path, flowchart) = match outcome {
        GenerateOutcome::Success { path, flowchart } => (path, flowchart),
        GenerateOutcome::FormatError { raw: payload } => {
            eprintln!("{UNEXPECTED_FORMAT_MSG}");
            if raw {
                eprintln!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                eprintln!("Re-run with --raw to see the response.");
            }
            return Err(anyhow!("generation returned an unexpected format"));
        }
        GenerateOutcome::TransportError { message } => {
            return Err(anyhow!(message));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        print_summary(&path);
    }

    if mermaid {
        let roadmap = match flowchart {
            Some(code) => Roadmap::from_flowchart(code),
            None => Roadmap::from_path(&path),
        };
        println!("\n{}", roadmap.mermaid());
    }

    if save {
        let receipt = client.save(&path, user).await?;
        info!(path_id = %receipt.path_id, "saved learning path");
        println!("\nSaved as {}", receipt.path_id);
    }

    Ok(())
}

fn print_summary(path: &LearningPath) {
    println!("\n{}", path.title);
    if !path.overview.is_empty() {
        println!("{}", path.overview);
    }
    if !path.total_duration.is_empty() {
        println!("Total duration: {}", path.total_duration);
    }
    if let Some(difficulty) = &path.difficulty {
        println!("Difficulty: {difficulty}");
    }
    if let Some(prerequisites) = &path.prerequisites {
        println!("Prerequisites: {prerequisites}");
    }

    for (i, topic) in path.topics.iter().enumerate() {
        println!("\n{}. {} ({})", i + 1, topic.name, topic.duration);
        if !topic.description.is_empty() {
            println!("   {}", topic.description);
        }
        for day in &topic.study_plan {
            println!("   {}:", day.day);
            for task in &day.tasks {
                println!("     - {task}");
            }
        }
        for resource in &topic.resources {
            let video = if resource.is_embeddable_video() {
                " [video]"
            } else {
                ""
            };
            println!(
                "   {} {} ({}){} {}",
                resource.kind, resource.title, resource.estimated_time, video, resource.url
            );
        }
        for project in &topic.projects {
            println!(
                "   Project: {} [{}] - {}",
                project.name, project.complexity, project.description
            );
        }
    }

    if !path.projects.is_empty() {
        println!("\nPractical projects:");
        for project in &path.projects {
            println!("  - {project}");
        }
    }
}

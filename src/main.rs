use clap::Parser;
use site_harvest::results::CrawlResult;
use site_harvest::utils::sanitize_filename;
use site_harvest::workflow::{Submission, WorkflowClient, WorkflowResponse};
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let request = args.crawl_request()?;
    ::log::info!("Starting crawler for URI: {}", request.start_url);

    let start_time = std::time::Instant::now();
    let result = site_harvest::crawl(&request).await?;
    ::log::info!(
        "Crawling complete - visited {} pages in {:.2} seconds",
        result.visited_urls.len(),
        start_time.elapsed().as_secs_f64()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", sanitize_filename(&result.start_url)));
        std::fs::write(&path, serde_json::to_string_pretty(&result)?)?;
        ::log::info!("Saved result to {}", path.display());
    }

    if args.submit {
        let config = args
            .workflow_config()?
            .ok_or("--submit needs --workflow-config, --workflow-url or --workflow-endpoint")?;
        let client = WorkflowClient::new(config)?;
        let response = client.submit(&Submission::from(&result)).await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            print_workflow_response(&response);
        }
    }

    Ok(())
}

fn print_result(result: &CrawlResult) {
    println!("Visited pages ({}):", result.visited_urls.len());
    for url in &result.visited_urls {
        println!("  {}", url);
    }

    println!("\nImages ({}):", result.image_urls.len());
    for url in &result.image_urls {
        println!("  {}", url);
    }

    println!("\nExtracted text ({} chars):", result.text.chars().count());
    if result.text.is_empty() {
        println!("  (no text found)");
    } else {
        println!("{}", result.text);
    }
}

fn print_workflow_response(response: &WorkflowResponse) {
    println!("\nBusiness / product description:");
    println!("{}", response.business_summary);

    if response.poster_concepts.is_empty() {
        println!("\nNo poster concepts returned.");
        return;
    }
    for (i, concept) in response.poster_concepts.iter().enumerate() {
        println!("\nPoster concept {}", i + 1);
        println!("  Headline: {}", concept.headline);
        println!("  Subhead:  {}", concept.subhead);
        println!("  CTA:      {}", concept.cta);
    }
}

// Judge a few artworks and print one line per result.
//
// NVIDIA_API_KEY=nvapi-... cargo run --example judge_batch --features logging -- URL[,URL...]
use artjudge::{parse_submissions, ArtJudge, NoopEvents};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let urls = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://upload.wikimedia.org/wikipedia/commons/e/ea/Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg".to_string());
    let api_key = std::env::var("NVIDIA_API_KEY").unwrap_or_default();

    let judge = ArtJudge::builder()
        .api_key(api_key)
        .max_dimension(1024)
        .build()?;

    let results = judge.evaluate(&parse_submissions(&urls), &NoopEvents).await;
    for record in &results {
        let score = record
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}: {} ({score})", record.artwork, record.overall);
    }
    Ok(())
}

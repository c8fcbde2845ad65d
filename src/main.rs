use eyre::bail;
use tracing::info;
use tunelookup_init::init;
use tunelookup_spotify_api::ClientCredentials;
use tunelookup_spotify_api::SpotifyClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let uris: Vec<String> = std::env::args().skip(1).collect();
    if uris.is_empty() {
        bail!("Usage: tunelookup <track-uri>...");
    }

    let client = SpotifyClient::connect(ClientCredentials::from_env()?).await?;
    info!("Looking up {} track(s)", uris.len());

    let tracks = client.get_song_titles(&uris).await?;
    println!("{:#?}", tracks);

    Ok(())
}

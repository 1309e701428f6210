use catalog_client::{
     ClientConfig, EditError, GameApi, GameEditController, GameListController, HttpGameApi,
     MockGameApi, Route,
};
use chrono::{Datelike, Local};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
     dotenv().ok();

     tracing_subscriber::fmt()
          .with_env_filter(
               EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
          )
          .init();

     let config = ClientConfig::from_env();
     if config.use_mock {
          run(MockGameApi::seeded()).await
     } else {
          run(HttpGameApi::new(&config)?).await
     }
}

async fn run<A: GameApi + Clone>(api: A) -> Result<(), Box<dyn std::error::Error>> {
     let today = Local::now().date_naive();

     let mut list = GameListController::new(api.clone());
     list.initialize().await?;

     println!("--- Catalog ---");
     for card in list.cards() {
          let game = card.game();
          println!(
               "{} ({}, {} years) [{}]",
               game.name,
               game.date_release,
               game.years_since_release(today),
               card.offer_badge(today.year()),
          );
     }
     println!("Games: {}", list.game_names());

     if let Some(card) = list.card(0) {
          card.title_click();
     }
     list.process_events();
     println!("\n--- Sellers ---");
     for seller in list.seller_panel().sellers() {
          let stock = if seller.is_available { "in stock" } else { "sold out" };
          println!("{}: {} ({} units, {})", seller.name, seller.price, seller.amount, stock);
     }
     list.close_seller_list();

     println!("\n--- Testing insert ---");

     if let Some(card) = list.card(0) {
          card.image_click();
     }
     list.process_events();
     let route = list.take_navigation().unwrap_or(Route::NewGame);
     println!("Opening {}", route.path());

     let Some(mut edit) = GameEditController::for_route(api, &route, today) else {
          return Ok(());
     };
     edit.initialize().await?;
     let form = edit.form_mut();
     form.name = "Tetris".to_string();
     form.image_url = "tetris.png".to_string();
     form.date_release = "1984-06-06".to_string();

     match edit.save().await {
          Err(EditError::Validation(errors)) => {
               println!("{}", errors);
               for error in &errors.errors {
                    println!("  {}", error.message());
               }
          }
          other => {
               other?;
          }
     }

     edit.form_mut().image_url =
          "https://upload.wikimedia.org/wikipedia/en/7/7d/Tetris_NES_cover_art.jpg".to_string();
     let saved = edit.save().await?;
     println!("Created game: {:?}", saved);

     list.initialize().await?;
     println!("Games: {}", list.game_names());

     Ok(())
}

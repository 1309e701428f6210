use std::sync::Arc;

use common::{Game, seed_games};
use tokio::sync::RwLock;

/// In-memory game collection. Insertion order is preserved and names are not deduplicated.
#[derive(Debug, Default)]
pub struct GameStore {
     games: Vec<Game>,
}

impl GameStore {
     pub fn seeded() -> Self {
          Self { games: seed_games() }
     }

     pub fn all(&self) -> &[Game] {
          &self.games
     }

     /// Appends `game` and returns the new collection size.
     pub fn insert(&mut self, game: Game) -> usize {
          self.games.push(game);
          self.games.len()
     }

     pub fn len(&self) -> usize {
          self.games.len()
     }
}

pub type SharedStore = Arc<RwLock<GameStore>>;

pub fn shared(store: GameStore) -> SharedStore {
     Arc::new(RwLock::new(store))
}

#[cfg(test)]
mod tests {
     use super::*;
     use chrono::NaiveDate;

     #[test]
     fn insert_appends_duplicates() {
          let mut store = GameStore::seeded();
          let before = store.len();
          let game = Game::new("Sonic", NaiveDate::from_ymd_opt(1991, 6, 23).unwrap());

          assert_eq!(store.insert(game.clone()), before + 1);
          assert_eq!(store.insert(game.clone()), before + 2);

          assert_eq!(store.len(), before + 2);
          assert_eq!(store.all()[before], game);
          assert_eq!(store.all().last(), Some(&game));
     }
}

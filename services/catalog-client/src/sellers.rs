use common::Seller;

/// Seller list shown beside the game list. Hidden until a title is clicked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerPanel {
    visible: bool,
    sellers: Vec<Seller>,
}

impl SellerPanel {
    /// Replaces the contents and shows the panel.
    pub fn show(&mut self, sellers: Vec<Seller>) {
        self.sellers = sellers;
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }
}

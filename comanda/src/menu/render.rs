//! Menu card renderer
//!
//! Renders fetched menu items into fixed-width text cards. One card per
//! item: name, price line with an inert add affordance, image reference.

use shared::MenuItem;

/// Substitute image shown when an item's image reference is unusable
pub const FALLBACK_IMAGE_URL: &str = "https://source.unsplash.com/random/200x200/?food";

/// Menu card renderer
///
/// Card width is in characters, borders included.
pub struct MenuCardRenderer {
    width: usize,
}

impl MenuCardRenderer {
    /// Create a renderer with the given card width
    ///
    /// Widths below 16 are clamped so the price line always fits.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(16),
        }
    }

    /// Render all items, one card per item
    pub fn render(&self, items: &[MenuItem]) -> String {
        let mut out = String::new();
        for item in items {
            self.render_card(&mut out, item);
        }
        out
    }

    fn render_card(&self, out: &mut String, item: &MenuItem) {
        let inner = self.width - 4;
        let border = format!("+{}+\n", "-".repeat(self.width - 2));

        out.push_str(&border);
        out.push_str(&format!("| {:<inner$} |\n", clip(&item.name, inner)));

        // Price in the original document's format, add affordance on the right
        let price = format!("${}/-", item.price);
        let gap = inner.saturating_sub(price.len() + 3);
        out.push_str(&format!("| {}{}[+] |\n", price, " ".repeat(gap)));

        let image = format!("img: {}", image_ref(item));
        out.push_str(&format!("| {:<inner$} |\n", clip(&image, inner)));
        out.push_str(&border);
    }
}

/// Image reference for a card, swapping in the fallback when the item's
/// reference can never load (empty or not an http(s) URL)
fn image_ref(item: &MenuItem) -> &str {
    if item.img_src.starts_with("http://") || item.img_src.starts_with("https://") {
        &item.img_src
    } else {
        FALLBACK_IMAGE_URL
    }
}

/// Truncate to at most `max` characters on a char boundary
fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

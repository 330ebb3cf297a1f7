//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Matches the remote menu document record shape. The image field travels
/// as `imgSrc` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{"name":"Test Burger","price":5,"imgSrc":"x"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.name, "Test Burger");
        assert_eq!(item.price, 5.0);
        assert_eq!(item.img_src, "x");
    }

    #[test]
    fn test_serialize_uses_img_src_key() {
        let item = MenuItem {
            name: "Cheeseburger".to_string(),
            price: 4.5,
            img_src: "https://example.com/cheese.png".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("imgSrc").is_some());
        assert!(json.get("img_src").is_none());
        assert_eq!(json["price"], 4.5);
    }

    #[test]
    fn test_deserialize_array() {
        let json = r#"[
            {"name":"A","price":1,"imgSrc":""},
            {"name":"B","price":2.25,"imgSrc":"http://img/b"}
        ]"#;
        let items: Vec<MenuItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].price, 2.25);
    }
}

//! Built-in catalog used when no configuration file is given

use super::{Banner, CarouselConfig, CatalogConfig, IdentityConfig, JoinConfig, ServerConfig};
use crate::core::{Item, ItemId, ItemKind, ProductInfo, VideoInfo};
use indexmap::IndexMap;

pub(super) fn server() -> ServerConfig {
    ServerConfig::default()
}

pub(super) fn carousel() -> CarouselConfig {
    let banners = [
        "Celebrate women-led businesses",
        "Handmade with purpose",
        "Learn, grow and lead",
        "Sustainable by design",
        "Shop the artisan marketplace",
        "Join a community of founders",
    ]
    .iter()
    .enumerate()
    .map(|(i, alt)| Banner {
        image: format!("/assets/banners/banner-{}.jpg", i + 1),
        alt: alt.to_string(),
        link: None,
    })
    .collect();

    CarouselConfig {
        interval_ms: 5000,
        banners,
    }
}

pub(super) fn join() -> JoinConfig {
    JoinConfig {
        interval_ms: 2000,
        headline: "Women".to_string(),
        words: [
            "Entrepreneurs",
            "Creators",
            "Leaders",
            "Innovators",
            "Visionaries",
            "Changemakers",
            "Founders",
        ]
        .map(str::to_string)
        .to_vec(),
        pitch: "Empowering women entrepreneurs to showcase their businesses, grow their \
                brands, and access financial literacy resources. Join our marketplace, \
                connect with customers, and take your business to the next level!"
            .to_string(),
    }
}

pub(super) fn identity() -> IdentityConfig {
    IdentityConfig::default()
}

pub(super) fn catalog() -> CatalogConfig {
    CatalogConfig {
        categories: [
            "Jewelry",
            "Skincare",
            "Apparel",
            "Home Decor",
            "Accessories",
            "Food",
            "Finance",
            "Marketing",
            "Leadership",
        ]
        .map(str::to_string)
        .to_vec(),
        products: products(),
        videos: videos(),
    }
}

struct ProductSeed {
    id: ItemId,
    title: &'static str,
    maker: &'static str,
    category: &'static str,
    description: &'static str,
    price: f64,
    discount: Option<f64>,
    rating: f64,
    review_count: u32,
    stock: u32,
    badges: &'static [&'static str],
}

impl ProductSeed {
    fn into_item(self) -> Item {
        Item {
            id: self.id,
            title: self.title.to_string(),
            subtitle: Some(format!("By {}", self.maker)),
            description: self.description.to_string(),
            category: self.category.to_string(),
            rating: self.rating,
            badges: self.badges.iter().map(|b| b.to_string()).collect(),
            image: Some(format!("/assets/products/{}.jpg", self.id)),
            kind: ItemKind::Product(ProductInfo {
                price: self.price,
                discount: self.discount,
                stock: self.stock,
                review_count: self.review_count,
                details: Vec::new(),
                specifications: IndexMap::new(),
            }),
        }
    }
}

fn products() -> Vec<Item> {
    let mut items: Vec<Item> = [
        ProductSeed {
            id: 1,
            title: "Handcrafted Jewelry Set",
            maker: "Artisan Creations",
            category: "Jewelry",
            description: "This beautiful handmade jewelry set includes earrings, necklace, and \
                          bracelet. Each piece is crafted with sustainable materials and features \
                          unique designs inspired by nature.",
            price: 89.99,
            discount: Some(15.0),
            rating: 4.7,
            review_count: 124,
            stock: 12,
            badges: &["Handmade", "Eco-friendly"],
        },
        ProductSeed {
            id: 2,
            title: "Organic Skincare Bundle",
            maker: "Pure Roots",
            category: "Skincare",
            description: "Cleanser, toner and moisturiser made from cold-pressed botanical oils.",
            price: 45.5,
            discount: None,
            rating: 4.5,
            review_count: 86,
            stock: 20,
            badges: &["Organic", "Cruelty-free"],
        },
        ProductSeed {
            id: 3,
            title: "Hand-woven Cotton Scarf",
            maker: "Loom Sisters",
            category: "Apparel",
            description: "Lightweight scarf woven on traditional looms from undyed cotton.",
            price: 32.0,
            discount: Some(10.0),
            rating: 4.3,
            review_count: 57,
            stock: 25,
            badges: &["Handmade"],
        },
        ProductSeed {
            id: 4,
            title: "Ceramic Vase Collection",
            maker: "Clay & Co",
            category: "Home Decor",
            description: "Three wheel-thrown vases glazed in earthy tones.",
            price: 64.0,
            discount: None,
            rating: 4.8,
            review_count: 41,
            stock: 8,
            badges: &["Handmade", "Limited"],
        },
        ProductSeed {
            id: 5,
            title: "Beaded Leather Tote",
            maker: "Kanga Studio",
            category: "Accessories",
            description: "Full-grain leather tote finished with hand-stitched beadwork.",
            price: 120.0,
            discount: Some(20.0),
            rating: 4.6,
            review_count: 73,
            stock: 5,
            badges: &["Handmade", "Fair Trade"],
        },
        ProductSeed {
            id: 6,
            title: "Spiced Honey Gift Jar",
            maker: "Hive Collective",
            category: "Food",
            description: "Raw wildflower honey infused with cinnamon and clove.",
            price: 18.75,
            discount: None,
            rating: 4.9,
            review_count: 210,
            stock: 40,
            badges: &["Organic"],
        },
        ProductSeed {
            id: 7,
            title: "Silver Leaf Earrings",
            maker: "Artisan Creations",
            category: "Jewelry",
            description: "Recycled sterling silver drops shaped like falling leaves.",
            price: 38.0,
            discount: None,
            rating: 4.4,
            review_count: 33,
            stock: 15,
            badges: &["Eco-friendly"],
        },
        ProductSeed {
            id: 8,
            title: "Shea Butter Body Cream",
            maker: "Pure Roots",
            category: "Skincare",
            description: "Whipped unrefined shea butter for dry skin.",
            price: 22.0,
            discount: Some(5.0),
            rating: 4.2,
            review_count: 98,
            stock: 0,
            badges: &["Organic"],
        },
        ProductSeed {
            id: 9,
            title: "Batik Print Dress",
            maker: "Loom Sisters",
            category: "Apparel",
            description: "Wax-resist dyed cotton dress with a relaxed fit.",
            price: 75.0,
            discount: None,
            rating: 4.1,
            review_count: 19,
            stock: 6,
            badges: &["Handmade"],
        },
        ProductSeed {
            id: 10,
            title: "Woven Wall Hanging",
            maker: "Clay & Co",
            category: "Home Decor",
            description: "Macrame wall hanging knotted from recycled cotton cord.",
            price: 55.0,
            discount: Some(12.0),
            rating: 4.6,
            review_count: 27,
            stock: 4,
            badges: &["Handmade", "Eco-friendly"],
        },
        ProductSeed {
            id: 11,
            title: "Recycled Glass Bracelet",
            maker: "Kanga Studio",
            category: "Accessories",
            description: "Beads cast from recycled bottles, strung on waxed cord.",
            price: 26.0,
            discount: None,
            rating: 3.9,
            review_count: 44,
            stock: 30,
            badges: &["Eco-friendly", "Fair Trade"],
        },
        ProductSeed {
            id: 12,
            title: "Artisan Coffee Blend",
            maker: "Hive Collective",
            category: "Food",
            description: "Medium roast from women-run cooperatives in the highlands.",
            price: 16.5,
            discount: None,
            rating: 4.7,
            review_count: 152,
            stock: 60,
            badges: &["Fair Trade", "Organic"],
        },
    ]
    .into_iter()
    .map(ProductSeed::into_item)
    .collect();

    if let Some(ItemKind::Product(jewelry)) = items.first_mut().map(|item| &mut item.kind) {
        jewelry.details = [
            "Handcrafted by skilled artisans",
            "Made with sustainable materials",
            "Nickel-free and hypoallergenic",
            "Adjustable chain length",
            "Comes in a gift box",
        ]
        .map(str::to_string)
        .to_vec();
        jewelry.specifications = [
            ("Materials", "Recycled sterling silver, ethically sourced gemstones"),
            ("Chain Length", "18 inches (adjustable)"),
            ("Earring Type", "Drop earrings with butterfly backs"),
            ("Bracelet Size", "7 inches with 1-inch extender"),
            ("Weight", "28 grams"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    }

    items
}

fn video(
    id: ItemId,
    title: &str,
    category: &str,
    description: &str,
    presenter: &str,
    duration_minutes: u32,
    rating: f64,
) -> Item {
    Item {
        id,
        title: title.to_string(),
        subtitle: Some(presenter.to_string()),
        description: description.to_string(),
        category: category.to_string(),
        rating,
        badges: vec![format!("{} min", duration_minutes)],
        image: Some(format!("/assets/videos/{}.jpg", id)),
        kind: ItemKind::Video(VideoInfo {
            duration_minutes,
            presenter: presenter.to_string(),
        }),
    }
}

fn videos() -> Vec<Item> {
    vec![
        video(
            101,
            "Financial Literacy Basics",
            "Finance",
            "Budgeting, saving and reading a balance sheet.",
            "Amara Okafor",
            24,
            4.8,
        ),
        video(
            102,
            "Pricing Your Handmade Products",
            "Finance",
            "Cost of materials, time and margin without underselling.",
            "Lena Brooks",
            18,
            4.6,
        ),
        video(
            103,
            "Social Media Marketing for Small Business",
            "Marketing",
            "Planning a content calendar that sells.",
            "Priya Raman",
            32,
            4.5,
        ),
        video(
            104,
            "Building Your Brand Story",
            "Marketing",
            "Turning your journey into a brand customers remember.",
            "Sofia Mendes",
            21,
            4.7,
        ),
        video(
            105,
            "Leading with Confidence",
            "Leadership",
            "Decision making and delegation as your team grows.",
            "Grace Mwangi",
            27,
            4.9,
        ),
        video(
            106,
            "Negotiation Skills for Founders",
            "Leadership",
            "Preparing for supplier and investor conversations.",
            "Hana Sato",
            35,
            4.4,
        ),
    ]
}

//! Test Helpers

use herbarium::{
    ids::{ArticleSlug, PostSlug, ProductId},
    publications::{Article, BlogPost, Seo},
};
use jiff::Timestamp;

use crate::domain::products::data::NewProduct;

fn timestamp(value: Option<&str>) -> Option<Timestamp> {
    value.map(|value| value.parse().expect("valid test timestamp"))
}

pub(crate) fn new_product(id: &str, category: &str) -> NewProduct {
    NewProduct {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: format!("Description of product {id}"),
        price: 64_900,
        original_price: None,
        image: format!("/images/products/{id}.jpg"),
        images: Vec::new(),
        rating: 4.5,
        review_count: 12,
        category: category.to_string(),
        tags: Vec::new(),
        benefits: vec!["Supports calm".to_string()],
        ingredients: vec!["Ashwagandha root".to_string()],
        usage: "Take one capsule daily.".to_string(),
        is_new: false,
        is_bestseller: false,
        in_stock: true,
        sku: format!("SKU-{id}"),
        weight: None,
        dimensions: None,
        position: 0,
    }
}

pub(crate) fn new_post(slug: &str, category: &str, published_at: Option<&str>) -> BlogPost {
    BlogPost {
        slug: PostSlug::new(slug),
        title: format!("Post {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        content: "Body".to_string(),
        image: format!("/images/blog/{slug}.jpg"),
        author: "Dr. Priya Sharma".to_string(),
        published_at: timestamp(published_at),
        updated_at: None,
        read_time: 5,
        category: category.to_string(),
        tags: Vec::new(),
        featured: false,
        seo: Seo::default(),
    }
}

pub(crate) fn new_article(slug: &str, category: &str, published_at: Option<&str>) -> Article {
    Article {
        slug: ArticleSlug::new(slug),
        title: format!("Article {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        content: "Body".to_string(),
        image: format!("/images/articles/{slug}.jpg"),
        author: "Dr. Rajesh Kumar".to_string(),
        published_at: timestamp(published_at),
        updated_at: None,
        read_time: 8,
        category: category.to_string(),
        tags: Vec::new(),
        featured: false,
        seo: Seo::default(),
        related_products: Vec::new(),
    }
}

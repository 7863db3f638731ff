//! Test fixtures

use jiff::Timestamp;

use crate::{
    ids::{ArticleSlug, PostSlug, ProductId},
    products::Product,
    publications::{Article, BlogPost, Seo},
};

pub(crate) fn product(id: &str, category: &str) -> Product {
    Product {
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
        benefits: Vec::new(),
        ingredients: Vec::new(),
        usage: String::new(),
        is_new: false,
        is_bestseller: false,
        in_stock: true,
        sku: format!("SKU-{id}"),
        weight: None,
        dimensions: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn post(slug: &str, category: &str, published_at: Option<Timestamp>) -> BlogPost {
    BlogPost {
        slug: PostSlug::new(slug),
        title: format!("Post {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        content: "Body".to_string(),
        image: format!("/images/blog/{slug}.jpg"),
        author: "Dr. Priya Sharma".to_string(),
        published_at,
        updated_at: None,
        read_time: 5,
        category: category.to_string(),
        tags: Vec::new(),
        featured: false,
        seo: Seo::default(),
    }
}

pub(crate) fn article(slug: &str, category: &str) -> Article {
    Article {
        slug: ArticleSlug::new(slug),
        title: format!("Article {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        content: "Body".to_string(),
        image: format!("/images/articles/{slug}.jpg"),
        author: "Dr. Rajesh Kumar".to_string(),
        published_at: None,
        updated_at: None,
        read_time: 8,
        category: category.to_string(),
        tags: Vec::new(),
        featured: false,
        seo: Seo::default(),
        related_products: Vec::new(),
    }
}

//! Test helpers.

use std::sync::Arc;

use herbarium::{
    ids::{ArticleSlug, PostSlug, ProductId},
    products::Product,
    publications::{Article, BlogPost, Seo},
    site::Site,
};
use herbarium_app::{
    context::AppContext,
    domain::{
        articles::MockArticlesService, content::MockContentService, posts::MockPostsService,
        products::MockProductsService,
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use crate::{router::app_router, state::State};

/// Service mocks; a call nobody expected fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) posts: MockPostsService,
    pub(crate) articles: MockArticlesService,
    pub(crate) content: MockContentService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext {
            products: Arc::new(self.products),
            posts: Arc::new(self.posts),
            articles: Arc::new(self.articles),
            content: Arc::new(self.content),
        };

        State::shared(app, Site::default())
    }
}

/// `route` alone, with state injected.
pub(crate) fn page_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// The whole site, with state injected.
pub(crate) fn site_service(mocks: Mocks) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .push(app_router()),
    )
}

pub(crate) fn make_product(id: ProductId, category: &str) -> Product {
    Product {
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
        benefits: vec!["Supports restful sleep".to_string()],
        ingredients: vec!["Ashwagandha root".to_string()],
        usage: "Take one capsule twice daily.".to_string(),
        is_new: false,
        is_bestseller: false,
        in_stock: true,
        sku: format!("SKU-{id}"),
        weight: None,
        dimensions: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        id,
    }
}

pub(crate) fn make_post(slug: &str, category: &str) -> BlogPost {
    BlogPost {
        slug: PostSlug::new(slug),
        title: format!("Post {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        content: format!("# Post {slug}\n\nBody of {slug}."),
        image: format!("/images/blog/{slug}.jpg"),
        author: "Dr. Priya Sharma".to_string(),
        published_at: None,
        updated_at: None,
        read_time: 5,
        category: category.to_string(),
        tags: Vec::new(),
        featured: false,
        seo: Seo::default(),
    }
}

pub(crate) fn make_article(slug: &str, category: &str) -> Article {
    Article {
        slug: ArticleSlug::new(slug),
        title: format!("Article {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        content: format!("## Article {slug}\n\nBody of {slug}."),
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

//! HTTP client for the external catalog API.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::models::Product;
use crate::catalog::records::{
    BrandRecord, CategoryRecord, NewBrand, NewCategory, NewProduct, ProductRecord, UploadedImage,
};

/// Tenant header sent when a tenant id is configured.
const TENANT_HEADER: &str = "X-Empresa-Id";

/// Configuration for connecting to the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API base URL, e.g. `"https://localhost:7146"`.
    pub base_url: String,

    /// Tenant id sent as `X-Empresa-Id` on every request, when set.
    pub tenant_id: Option<i64>,
}

/// Errors that can occur when communicating with the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The API returned a non-2xx response.
    #[error("unexpected response from catalog API: {0}")]
    UnexpectedResponse(String),
}

/// HTTP client for the catalog API.
///
/// Shop reads return the flattened [`Product`] models; admin operations
/// exchange the raw records so gallery positions and overrides survive
/// round-trips through the product form.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    http: Client,
}

impl CatalogClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn categories(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        let response = self.request(Method::GET, "/api/Categories").send().await?;

        Self::expect_json(response).await
    }

    /// Fetch a single category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or an error on
    /// HTTP failure.
    pub async fn category(&self, id: i64) -> Result<CategoryRecord, CatalogError> {
        let response = self
            .request(Method::GET, &format!("/api/Categories/{id}"))
            .send()
            .await?;

        Self::expect_json(response).await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn create_category(
        &self,
        category: &NewCategory,
    ) -> Result<CategoryRecord, CatalogError> {
        let response = self
            .request(Method::POST, "/api/Categories")
            .json(category)
            .send()
            .await?;

        Self::expect_json(response).await
    }

    /// List all products, mapped for storefront display.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<ProductRecord> = {
            let response = self.request(Method::GET, "/api/Products").send().await?;

            Self::expect_json(response).await?
        };

        Ok(records.into_iter().map(Product::from).collect())
    }

    /// Fetch a single product, mapped for storefront display.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or an error on
    /// HTTP failure.
    pub async fn product(&self, id: i64) -> Result<Product, CatalogError> {
        let response = self
            .request(Method::GET, &format!("/api/Products/{id}"))
            .send()
            .await?;

        let record: ProductRecord = Self::expect_json(response).await?;

        Ok(record.into())
    }

    /// Fetch a single product by slug, mapped for storefront display.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown slug, or an error
    /// on HTTP failure.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, CatalogError> {
        let response = self
            .request(Method::GET, &format!("/api/Products/by-slug/{slug}"))
            .send()
            .await?;

        let record: ProductRecord = Self::expect_json(response).await?;

        Ok(record.into())
    }

    /// List the products of one category, mapped for storefront display.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn products_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<ProductRecord> = {
            let response = self
                .request(
                    Method::GET,
                    &format!("/api/Products/by-category/{category_id}"),
                )
                .send()
                .await?;

            Self::expect_json(response).await?
        };

        Ok(records.into_iter().map(Product::from).collect())
    }

    /// Fetch a single product in its raw record form for the admin console.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or an error on
    /// HTTP failure.
    pub async fn product_admin(&self, id: i64) -> Result<ProductRecord, CatalogError> {
        let response = self
            .request(Method::GET, &format!("/api/Products/{id}"))
            .send()
            .await?;

        Self::expect_json(response).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, CatalogError> {
        let response = self
            .request(Method::POST, "/api/Products")
            .json(&product.into_payload())
            .send()
            .await?;

        Self::expect_json(response).await
    }

    /// Replace a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or an error on
    /// HTTP failure.
    pub async fn update_product(
        &self,
        id: i64,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogError> {
        let response = self
            .request(Method::PUT, &format!("/api/Products/{id}"))
            .json(&product.into_payload())
            .send()
            .await?;

        Self::expect_json(response).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or an error on
    /// HTTP failure.
    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogError> {
        let response = self
            .request(Method::DELETE, &format!("/api/Products/{id}"))
            .send()
            .await?;

        Self::check(response).await?;

        Ok(())
    }

    /// List all brands.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn brands(&self) -> Result<Vec<BrandRecord>, CatalogError> {
        let response = self.request(Method::GET, "/api/brands").send().await?;

        Self::expect_json(response).await
    }

    /// Create a brand.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn create_brand(&self, brand: &NewBrand) -> Result<BrandRecord, CatalogError> {
        let response = self
            .request(Method::POST, "/api/brands")
            .json(brand)
            .send()
            .await?;

        Self::expect_json(response).await
    }

    /// Upload a product image, returning its hosted URL.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn upload_product_image(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, CatalogError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .request(Method::POST, "/api/media/product-image")
            .multipart(form)
            .send()
            .await?;

        Self::expect_json(response).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);
        let builder = self.http.request(method, url);

        match self.config.tenant_id {
            Some(tenant_id) => builder.header(TENANT_HEADER, tenant_id),
            None => builder,
        }
    }

    async fn check(response: Response) -> Result<Response, CatalogError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "request failed with status {status}: {text}"
            )));
        }

        Ok(response)
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }
}

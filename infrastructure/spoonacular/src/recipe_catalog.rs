use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{Recipe, RecipeDetails, RecipeId};
use business::domain::recipe::services::{RecipeCatalogService, SearchResults};

use crate::client::SpoonacularClient;
use crate::dto::{ComplexSearchResponse, RandomRecipesResponse, RecipeDto, RecipeInformationDto};

pub struct RecipeCatalogSpoonacular {
    client: SpoonacularClient,
}

impl RecipeCatalogSpoonacular {
    pub fn new(client: SpoonacularClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RecipeError> {
        let response = request
            .query(&[("apiKey", self.client.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Spoonacular request failed: {}", e);
                RecipeError::RequestFailed
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Spoonacular rate limit reached");
                return Err(RecipeError::RateLimited);
            }
            StatusCode::NOT_FOUND => return Err(RecipeError::NotFound),
            status => {
                tracing::error!("Spoonacular responded with {}", status);
                return Err(RecipeError::RequestFailed);
            }
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Unreadable Spoonacular response: {}", e);
            RecipeError::MalformedResponse
        })
    }
}

#[async_trait]
impl RecipeCatalogService for RecipeCatalogSpoonacular {
    async fn search_recipes(
        &self,
        query: &str,
        offset: u32,
        page_size: u32,
    ) -> Result<SearchResults, RecipeError> {
        let request = self.client.client.get(self.client.complex_search_url()).query(&[
            ("query", query.to_string()),
            ("offset", offset.to_string()),
            ("number", page_size.to_string()),
            ("addRecipeInformation", "true".to_string()),
        ]);

        let data: ComplexSearchResponse = self.fetch(request).await?;

        Ok(SearchResults {
            results: data.results.into_iter().map(RecipeDto::into_domain).collect(),
            total_results: data.total_results,
        })
    }

    async fn get_recipe_by_id(&self, id: RecipeId) -> Result<RecipeDetails, RecipeError> {
        let request = self
            .client
            .client
            .get(self.client.information_url(id))
            .query(&[("includeNutrition", "true")]);

        let data: RecipeInformationDto = self.fetch(request).await?;
        Ok(data.into_domain())
    }

    async fn get_random_recipes(&self, number: u32) -> Result<Vec<Recipe>, RecipeError> {
        let request = self
            .client
            .client
            .get(self.client.random_url())
            .query(&[("number", number.to_string())]);

        let data: RandomRecipesResponse = self.fetch(request).await?;
        Ok(data.recipes.into_iter().map(RecipeDto::into_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_TIMEOUT;
    use business::domain::recipe::image::FALLBACK_IMAGE_URL;
    use mockito::{Matcher, Server};

    fn catalog(server: &Server) -> RecipeCatalogSpoonacular {
        RecipeCatalogSpoonacular::new(SpoonacularClient::with_base_url(
            "test-key".to_string(),
            server.url(),
            DEFAULT_TIMEOUT,
        )
        .unwrap())
    }

    #[tokio::test]
    async fn should_send_paging_parameters_and_map_results() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
                Matcher::UrlEncoded("query".into(), "pasta".into()),
                Matcher::UrlEncoded("offset".into(), "12".into()),
                Matcher::UrlEncoded("number".into(), "12".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "results": [
                        {"id": 1, "title": "Carbonara", "image": "https://img.spoonacular.com/recipes/1-312x231.jpg"},
                        {"id": 2, "title": "Pesto", "image": "not a url"}
                    ],
                    "offset": 12,
                    "number": 12,
                    "totalResults": 40
                }"#,
            )
            .create_async()
            .await;

        let result = catalog(&server).search_recipes("pasta", 12, 12).await.unwrap();

        assert_eq!(result.total_results, Some(40));
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[1].image, FALLBACK_IMAGE_URL);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn should_leave_total_undefined_when_upstream_omits_it() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let result = catalog(&server).search_recipes("pasta", 0, 12).await.unwrap();

        assert_eq!(result.total_results, None);
        assert!(result.results.is_empty());
    }

    #[tokio::test]
    async fn should_report_rate_limit_when_status_429() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"message": "quota exceeded"}"#)
            .create_async()
            .await;

        let result = catalog(&server).search_recipes("pasta", 0, 12).await;

        assert_eq!(result, Err(RecipeError::RateLimited));
    }

    #[tokio::test]
    async fn should_report_not_found_when_recipe_missing() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/recipes/999/information")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let result = catalog(&server).get_recipe_by_id(999).await;

        assert_eq!(result, Err(RecipeError::NotFound));
    }

    #[tokio::test]
    async fn should_report_malformed_response_when_body_not_json() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/recipes/random")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let result = catalog(&server).get_random_recipes(3).await;

        assert_eq!(result, Err(RecipeError::MalformedResponse));
    }

    #[tokio::test]
    async fn should_report_request_failed_when_server_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/recipes/random")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let result = catalog(&server).get_random_recipes(3).await;

        assert_eq!(result, Err(RecipeError::RequestFailed));
    }

    #[tokio::test]
    async fn should_fetch_details_with_nutrition() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/716429/information")
            .match_query(Matcher::UrlEncoded("includeNutrition".into(), "true".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": 716429,
                    "title": "Pasta with Garlic",
                    "image": "https://img.spoonacular.com/recipes/716429-556x370.jpg",
                    "readyInMinutes": 45,
                    "servings": 2,
                    "instructions": "Boil. Toss.",
                    "extendedIngredients": [],
                    "nutrition": {"nutrients": [{"name": "Protein", "amount": 14.2, "unit": "g"}]}
                }"#,
            )
            .create_async()
            .await;

        let details = catalog(&server).get_recipe_by_id(716429).await.unwrap();

        assert_eq!(details.recipe.ready_in_minutes, Some(45));
        assert_eq!(details.nutrition.unwrap().protein, "14 g");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn should_request_random_count() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/random")
            .match_query(Matcher::UrlEncoded("number".into(), "10".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"recipes": [{"id": 5, "title": "Dal", "image": "https://x.test/5.jpg"}]}"#)
            .create_async()
            .await;

        let recipes = catalog(&server).get_random_recipes(10).await.unwrap();

        assert_eq!(recipes[0].title, "Dal");
        mock.assert_async().await;
    }
}

use std::sync::Arc;

use logger::TracingLogger;
use persistence::backend::open_store;
use spoonacular::recipe_catalog::RecipeCatalogSpoonacular;
use tokio::sync::Mutex;

use business::application::meal_plan::assign::AssignMealUseCaseImpl;
use business::application::meal_plan::clear::ClearMealUseCaseImpl;
use business::application::meal_plan::get::GetMealPlanUseCaseImpl;
use business::application::preferences::get::GetPreferencesUseCaseImpl;
use business::application::preferences::update::UpdatePreferencesUseCaseImpl;
use business::application::recipe::get_details::GetRecipeDetailsUseCaseImpl;
use business::application::recipe::get_random::GetRandomRecipesUseCaseImpl;
use business::application::saved_recipe::container::SavedRecipesContainer;
use business::application::search::search_recipes::SearchRecipesUseCaseImpl;
use business::domain::storage::store::DurableStore;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recipe_api: crate::api::recipe::routes::RecipeApi,
    pub saved_recipe_api: crate::api::saved_recipe::routes::SavedRecipeApi,
    pub search_api: crate::api::search::routes::SearchApi,
    pub meal_plan_api: crate::api::meal_plan::routes::MealPlanApi,
    pub preferences_api: crate::api::preferences::routes::PreferencesApi,
    /// Kept so the binary can flush the collection after the server stops.
    pub saved_recipes: Arc<SavedRecipesContainer>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Infrastructure adapters
        let backend = open_store(&config.storage.backend)?;
        let store = Arc::new(DurableStore::new(
            backend,
            Arc::new(TracingLogger::new("storage")),
        ));
        let catalog = Arc::new(RecipeCatalogSpoonacular::new(config.spoonacular.client()?));

        // Saved recipes
        let saved_recipes = Arc::new(SavedRecipesContainer::start(
            store.clone(),
            Arc::new(TracingLogger::new("saved_recipes")),
        ));

        // Recipe use cases
        let recipe_logger = Arc::new(TracingLogger::new("recipes"));
        let get_details_use_case = Arc::new(GetRecipeDetailsUseCaseImpl {
            catalog: catalog.clone(),
            logger: recipe_logger.clone(),
        });
        let get_random_use_case = Arc::new(GetRandomRecipesUseCaseImpl {
            catalog: catalog.clone(),
            logger: recipe_logger,
        });

        // Search
        let search_use_case = Arc::new(SearchRecipesUseCaseImpl::new(
            catalog,
            Arc::new(TracingLogger::new("search")),
            config.search.page_size,
            config.search.stale_after,
        ));

        // Meal plan use cases
        let meal_plan_logger = Arc::new(TracingLogger::new("meal_plan"));
        let meal_plan_lock = Arc::new(Mutex::new(()));
        let get_meal_plan_use_case = Arc::new(GetMealPlanUseCaseImpl {
            store: store.clone(),
            logger: meal_plan_logger.clone(),
        });
        let assign_meal_use_case = Arc::new(AssignMealUseCaseImpl {
            store: store.clone(),
            write_lock: meal_plan_lock.clone(),
            logger: meal_plan_logger.clone(),
        });
        let clear_meal_use_case = Arc::new(ClearMealUseCaseImpl {
            store: store.clone(),
            write_lock: meal_plan_lock,
            logger: meal_plan_logger,
        });

        // Preferences use cases
        let preferences_logger = Arc::new(TracingLogger::new("preferences"));
        let get_preferences_use_case = Arc::new(GetPreferencesUseCaseImpl {
            store: store.clone(),
            logger: preferences_logger.clone(),
        });
        let update_preferences_use_case = Arc::new(UpdatePreferencesUseCaseImpl {
            store,
            logger: preferences_logger,
        });

        let health_api = crate::api::health::routes::Api::new(saved_recipes.clone());
        let recipe_api = crate::api::recipe::routes::RecipeApi::new(
            get_details_use_case,
            get_random_use_case,
            saved_recipes.clone(),
        );
        let saved_recipe_api =
            crate::api::saved_recipe::routes::SavedRecipeApi::new(saved_recipes.clone());
        let search_api =
            crate::api::search::routes::SearchApi::new(search_use_case, saved_recipes.clone());
        let meal_plan_api = crate::api::meal_plan::routes::MealPlanApi::new(
            get_meal_plan_use_case,
            assign_meal_use_case,
            clear_meal_use_case,
            saved_recipes.clone(),
        );
        let preferences_api = crate::api::preferences::routes::PreferencesApi::new(
            get_preferences_use_case,
            update_preferences_use_case,
        );

        Ok(Self {
            health_api,
            recipe_api,
            saved_recipe_api,
            search_api,
            meal_plan_api,
            preferences_api,
            saved_recipes,
        })
    }
}

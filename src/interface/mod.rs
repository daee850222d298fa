pub mod export;
pub mod prompts;
pub mod render;

pub use export::{
    write_checks_csv, write_foods_csv, write_meals_csv, write_menu_csv, write_menu_json,
    write_profiles_csv, write_serving_csv,
};
pub use prompts::{
    compose_menu, prompt_category, prompt_food, prompt_menu_entry, prompt_menu_name,
    prompt_remove_entry, prompt_weight, prompt_yes_no,
};
pub use render::{
    display_checks, display_food_list, display_meal_distribution, display_menu, display_profile,
    display_serving,
};

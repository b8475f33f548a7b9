pub mod use_life_form;

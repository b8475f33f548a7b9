pub mod birth_form;

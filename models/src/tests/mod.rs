mod backend;
mod localized_text;
mod registry;

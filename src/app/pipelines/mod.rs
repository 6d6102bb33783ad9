pub mod site_pipeline;

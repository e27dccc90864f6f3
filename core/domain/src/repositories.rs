mod article;

pub use article::ArticleRepository;

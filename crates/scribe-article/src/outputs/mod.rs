mod result;

pub use result::ArticleResult;

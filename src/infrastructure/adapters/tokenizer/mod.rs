//! Tokenizer Adapter - 分词器实现

mod jieba_tokenizer;
mod whitespace_tokenizer;

pub use jieba_tokenizer::{JiebaTokenizer, JiebaTokenizerConfig, DEFAULT_NAME_TAG};
pub use whitespace_tokenizer::WhitespaceTokenizer;

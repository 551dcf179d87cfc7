pub mod address;
pub mod attachment;
/// Email processing modules
pub mod parser;
pub mod tag;
pub mod translator;

pub use parser::{EmailParser, MailParserEmailParser};
pub use tag::PostmarkTag;
pub use translator::MessageTranslator;

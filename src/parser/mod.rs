use crate::document::Document;

/// One operation per document kind.
///
/// [`Document::accept`] picks the operation matching its own kind, so an
/// implementation never has to inspect the document it was handed.
pub trait Visitor {
    type Output;

    fn visit_zip(&mut self) -> Self::Output;
    fn visit_excel(&mut self) -> Self::Output;
    fn visit_doc(&mut self) -> Self::Output;
    fn visit_pdf(&mut self) -> Self::Output;
}

impl Document {
    pub fn accept<V: Visitor>(self, visitor: &mut V) -> V::Output {
        match self {
            Document::Zip => visitor.visit_zip(),
            Document::Excel => visitor.visit_excel(),
            Document::Doc => visitor.visit_doc(),
            Document::Pdf => visitor.visit_pdf(),
        }
    }
}

/// Parser that handles every document kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentParser;

impl Visitor for DocumentParser {
    type Output = String;

    fn visit_zip(&mut self) -> String {
        parse(Document::Zip)
    }

    fn visit_excel(&mut self) -> String {
        parse(Document::Excel)
    }

    fn visit_doc(&mut self) -> String {
        parse(Document::Doc)
    }

    fn visit_pdf(&mut self) -> String {
        parse(Document::Pdf)
    }
}

pub fn parse(doc: Document) -> String {
    format!("Parsed {}", doc.description())
}

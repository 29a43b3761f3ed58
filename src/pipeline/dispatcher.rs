use crate::document::Document;
use crate::parser::Visitor;

/// Apply `visitor` to every document, preserving input order.
pub fn dispatch<V: Visitor>(docs: &[Document], visitor: &mut V) -> Vec<V::Output> {
    dispatch_with(docs, visitor, |_, _| {})
}

/// Like [`dispatch`], calling `on_result` with each result's index as it is produced.
pub fn dispatch_with<V, F>(docs: &[Document], visitor: &mut V, mut on_result: F) -> Vec<V::Output>
where
    V: Visitor,
    F: FnMut(usize, &V::Output),
{
    let mut results = Vec::with_capacity(docs.len());
    for (index, doc) in docs.iter().enumerate() {
        let result = doc.accept(visitor);
        on_result(index, &result);
        results.push(result);
    }
    results
}

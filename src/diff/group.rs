use super::types::{DiffChunk, DiffKind, DiffToken};

/// Group diff tokens into chunks where consecutive unchanged words form one
/// `Same` chunk and each run of added/removed words forms one `Replace` chunk.
pub fn group_into_chunks(tokens: &[DiffToken]) -> Vec<DiffChunk> {
    let mut chunks = Vec::new();
    let mut i = 0usize;

    while i < tokens.len() {
        if tokens[i].kind == DiffKind::Same {
            let mut words = Vec::new();
            while i < tokens.len() && tokens[i].kind == DiffKind::Same {
                words.push(tokens[i].text.clone());
                i += 1;
            }
            chunks.push(DiffChunk::Same { words });
        } else {
            let mut removed = Vec::new();
            let mut added = Vec::new();
            while i < tokens.len() && tokens[i].kind != DiffKind::Same {
                match tokens[i].kind {
                    DiffKind::Remove => removed.push(tokens[i].text.clone()),
                    DiffKind::Add => added.push(tokens[i].text.clone()),
                    DiffKind::Same => unreachable!(),
                }
                i += 1;
            }
            chunks.push(DiffChunk::Replace { removed, added });
        }
    }

    chunks
}

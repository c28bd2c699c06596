//! Column-set plumbing for the transposition engine.
//!
//! A sanitized message is distributed round-robin into columns, permuted,
//! and joined into space-separated blocks; decoding splits the blocks back
//! out and reads them row-major. Everything here works on `Vec<char>`
//! columns so multi-byte characters index correctly after uppercasing.

/// Strip whitespace and uppercase. Idempotent.
pub fn sanitize(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Distribute a sanitized message round-robin into `count` columns:
/// the character at position `p` goes to column `p % count`.
///
/// For a message of `n` characters the first `n % count` columns hold one
/// character more than the rest.
pub fn distribute(message: &str, count: usize) -> Vec<Vec<char>> {
    if count == 0 {
        return Vec::new();
    }
    let mut columns = vec![Vec::new(); count];
    for (p, c) in message.chars().enumerate() {
        columns[p % count].push(c);
    }
    columns
}

/// Split a ciphertext on single spaces into its emitted column blocks.
/// Empty blocks are preserved: a short message over a long key legitimately
/// produces empty columns.
pub fn split_blocks(ciphertext: &str) -> Vec<Vec<char>> {
    ciphertext
        .split(' ')
        .map(|block| block.chars().collect())
        .collect()
}

/// Reorder columns so that position `i` of the result holds
/// `columns[order[i]]`.
pub fn reorder(columns: &[Vec<char>], order: &[usize]) -> Vec<Vec<char>> {
    order.iter().map(|&i| columns[i].clone()).collect()
}

/// Join columns into the space-separated block form the encoder emits.
pub fn join_blocks(columns: &[Vec<char>]) -> String {
    columns
        .iter()
        .map(|col| col.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read columns back row-major: for each row index, take that row's
/// character from every column that has one. Exact inverse of
/// [`distribute`] when the columns are in round-robin order.
pub fn read_row_major(columns: &[Vec<char>]) -> String {
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    let mut message = String::new();
    for r in 0..rows {
        for col in columns {
            if let Some(&c) = col.get(r) {
                message.push(c);
            }
        }
    }
    message
}

/// Re-insert block separators into a reconstructed intermediate message.
///
/// During multi-pass decode the text recovered by one pass is the previous
/// pass's ciphertext with its spaces sanitized away. The sanitized length
/// never changes across passes, so the previous ciphertext's blocks have
/// exactly the lengths of the blocks just split off this pass (in emitted
/// order). Cutting at those cumulative lengths restores the separators.
pub fn resegment(message: &str, block_lengths: &[usize]) -> String {
    let chars: Vec<char> = message.chars().collect();
    let mut blocks = Vec::with_capacity(block_lengths.len());
    let mut start = 0;
    for &len in block_lengths {
        let end = (start + len).min(chars.len());
        blocks.push(chars[start..end].iter().collect::<String>());
        start = end;
    }
    blocks.join(" ")
}

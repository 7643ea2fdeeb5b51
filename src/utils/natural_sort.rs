//! 学号的自然排序
//!
//! 数字片段按数值比较，其余片段忽略大小写按字典序比较，
//! 与浏览器 `localeCompare(b, undefined, { numeric: true })` 的结果一致。

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                out.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if let Some(prev) = in_digits {
        out.push(make_chunk(&s[start..], prev));
    }
    out
}

fn make_chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(s)
    } else {
        Chunk::Text(s)
    }
}

/// 按数值比较两个纯数字串，不受前导零与长度限制
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    a_lower.cmp(&b_lower)
}

/// 比较两个学号
pub fn compare_rolls(a: &str, b: &str) -> Ordering {
    let a_chunks = chunks(a);
    let b_chunks = chunks(b);

    for (x, y) in a_chunks.iter().zip(b_chunks.iter()) {
        let ord = match (x, y) {
            (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => compare_text(x, y),
            // 数字排在字母之前
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_chunks
        .len()
        .cmp(&b_chunks.len())
        // 数值相同（如 "002" 与 "2"）时保证结果稳定
        .then_with(|| a.cmp(b))
}

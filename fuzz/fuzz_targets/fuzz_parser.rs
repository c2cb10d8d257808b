#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use relaxjson::{Map as RelaxMap, Value as RelaxValue};
use serde_json::{Map, Value};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b",", // separators are optional, stray ones are accepted
    "\u{00A0}".as_bytes(),
    "\u{1680}".as_bytes(),
    "\u{2000}".as_bytes(),
    "\u{200A}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{202F}".as_bytes(),
    "\u{205F}".as_bytes(),
    "\u{3000}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

const KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || seed.is_multiple_of(10) {
        let mut prefix = 0;

        while prefix < size.max(1) && prefix < max_size {
            let limit = max_size - prefix;

            prefix += append_whitespace(&mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size.max(8), limit);
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N whitespace code-points (N chosen randomly) to `buf`,
/// but never exceed `limit`.  Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(1..=limit.min(8));
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];

            // Stop if this whitespace would overflow the caller’s slice.
            if written + w.len() > limit {
                break;
            }

            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }

    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        match ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            Ok(value) => break value,
            Err(_) => continue,
        };
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    // Truncated documents are useful inputs too.
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// A JSON value inside the grammar subset both parsers agree on: word
/// character keys and strings without backslashes or control characters.
#[derive(Debug)]
struct ArbitraryValue(Value);

fn arbitrary_key(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<String> {
    let len = u.int_in_range(1..=8)?;
    (0..len)
        .map(|_| u.choose(KEY_CHARS).map(|b| char::from(*b)))
        .collect()
}

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => {
                let s: String = u.arbitrary()?;
                Value::String(s.chars().filter(|c| *c != '\\' && !c.is_control()).collect())
            }
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let len = u.int_in_range(0..=4)?;
                let mut m = Map::new();
                for _ in 0..len {
                    m.insert(arbitrary_key(u)?, ArbitraryValue::arbitrary(u)?.0);
                }
                Value::Object(m)
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Converts a reference value, or `None` if a key falls outside `\w+`.
fn to_relaxed(value: Value) -> Option<RelaxValue> {
    Some(match value {
        Value::Null => RelaxValue::Null,
        Value::Bool(b) => RelaxValue::Boolean(b),
        Value::Number(n) => RelaxValue::Number(n.as_f64()?),
        Value::String(s) => RelaxValue::String(s),
        Value::Array(items) => RelaxValue::Array(
            items
                .into_iter()
                .map(to_relaxed)
                .collect::<Option<Vec<_>>>()?,
        ),
        Value::Object(map) => {
            let mut out = RelaxMap::new();
            for (k, v) in map {
                if k.is_empty() || !k.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
                    return None;
                }
                out.insert(k, to_relaxed(v)?);
            }
            RelaxValue::Object(out)
        }
    })
}

fn parser(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    // Must never panic, whatever the input.
    let parsed = relaxjson::parse(&text);
    if let Err(err) = &parsed {
        assert!(err.offset() <= text.len());
    }

    // Where strict JSON applies and no escapes or line separators are
    // involved, both parsers must agree.
    if text.contains(['\\', '\u{2028}', '\u{2029}']) {
        return;
    }
    let Ok(reference) = serde_json::from_str::<Value>(&text) else {
        return;
    };
    if let Some(expected) = to_relaxed(reference) {
        assert_eq!(parsed, Ok(Some(expected)), "input: {text:?}");
    }
}

fuzz_target!(|data: &[u8]| parser(data));

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::error::HuffError;
use crate::CodeTable;

/// concatenates the codes of `symbols` in sequence order
///
/// Symbols without an entry in `table` are skipped. Use [`encode_strict`] when the table was not built
/// from the same sequence.
pub fn encode<'a, S, I>(symbols: I, table: &CodeTable<S>) -> String
where
    S: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut out = String::new();
    let mut skipped = 0;
    for symbol in symbols {
        match table.get(symbol) {
            Some(code) => out.push_str(code),
            None => skipped += 1,
        }
    }
    if skipped != 0 {
        debug!("skipped {} symbols without code", skipped);
    }
    out
}

/// like [`encode`], but fails on the first symbol without an entry in `table`
pub fn encode_strict<'a, S, I>(symbols: I, table: &CodeTable<S>) -> Result<String, HuffError>
where
    S: Eq + Hash + Debug + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut out = String::new();
    for (position, symbol) in symbols.into_iter().enumerate() {
        let code = table.get(symbol).ok_or_else(|| HuffError::UnknownSymbol {
            position,
            symbol: format!("{:?}", symbol),
        })?;
        out.push_str(code);
    }
    Ok(out)
}

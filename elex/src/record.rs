// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! The common shape of everything the command line tool can output.

use serde_json::Value;

/// A serialized record. Keys keep insertion order, which is the field order of the record type.
pub type Row = serde_json::Map<String,Value>;

/// A record that can be flattened into an ordered field mapping.
///
/// The order of [Record::FIELD_NAMES] is part of the output format: it is the CSV header
/// and the key order of every JSON object. Implementations must return
/// [Record::field_values] in exactly that order.
pub trait Record {
    const FIELD_NAMES : &'static [&'static str];

    fn field_values(&self) -> Vec<Value>;

    fn serialize(&self) -> Row {
        Self::FIELD_NAMES.iter().map(|name|name.to_string()).zip(self.field_values()).collect()
    }
}

/// A collection of serialized records of a single type.
#[derive(Debug,Clone,PartialEq)]
pub struct RecordSet {
    /// The field names of the record type, available even if there are no rows.
    pub field_names : &'static [&'static str],
    pub rows : Vec<Row>,
}

impl RecordSet {
    pub fn collect<'a,R:Record+'a>(records:impl IntoIterator<Item=&'a R>) -> Self {
        RecordSet{ field_names: R::FIELD_NAMES, rows: records.into_iter().map(|r|r.serialize()).collect() }
    }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// The text a value takes in a CSV cell.
///
/// Null becomes an empty cell, as CSV has no null. Booleans are spelt `True` and `False`.
/// ```
/// use serde_json::json;
/// use elex::csv_text;
/// assert_eq!(csv_text(&json!(null)),"");
/// assert_eq!(csv_text(&json!(false)),"False");
/// assert_eq!(csv_text(&json!(1234)),"1234");
/// assert_eq!(csv_text(&json!("Bevin")),"Bevin");
/// ```
pub fn csv_text(value:&Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Pair { name : String, count : Option<u64> }

    impl Record for Pair {
        const FIELD_NAMES: &'static [&'static str] = &["name","count"];
        fn field_values(&self) -> Vec<Value> { vec![self.name.clone().into(),self.count.into()] }
    }

    #[test]
    fn test_serialize_keeps_field_order() {
        let row = Pair{ name: "zed".to_string(), count: None }.serialize();
        assert_eq!(row.keys().collect::<Vec<_>>(),vec!["name","count"]);
        assert_eq!(row["count"],Value::Null);
    }

    #[test]
    fn test_empty_record_set_has_field_names() {
        let none : Vec<Pair> = vec![];
        let set = RecordSet::collect(&none);
        assert!(set.is_empty());
        assert_eq!(set.field_names,&["name","count"]);
    }

    #[test]
    fn test_csv_text_floats() {
        assert_eq!(csv_text(&json!(0.5)),"0.5");
        assert_eq!(csv_text(&json!(true)),"True");
    }
}

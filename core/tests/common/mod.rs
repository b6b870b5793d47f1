#![allow(dead_code)]

use docnav_core::IndexDocument;
use docnav_core::types::{FlatIndexEntry, Uid};

pub const INDEX_JSON: &str = r#"{
    "interfaceLanguages": {
        "swift": [
            {
                "title": "SlothCreator",
                "path": "/documentation/slothcreator",
                "type": "module",
                "children": [
                    { "title": "Essentials", "type": "groupMarker" },
                    {
                        "title": "Getting Started with Sloths",
                        "path": "/documentation/slothcreator/gettingstarted",
                        "type": "article"
                    },
                    {
                        "title": "Sloth",
                        "path": "/documentation/slothcreator/sloth",
                        "type": "struct",
                        "beta": true,
                        "children": [
                            { "title": "Creating a Sloth", "type": "groupMarker" },
                            {
                                "title": "init(name:color:power:)",
                                "path": "/documentation/slothcreator/sloth/init(name:color:power:)",
                                "type": "init",
                                "beta": true
                            },
                            { "title": "Activities", "type": "groupMarker" },
                            {
                                "title": "eat(_:quantity:)",
                                "path": "/documentation/slothcreator/sloth/eat(_:quantity:)",
                                "type": "method",
                                "deprecated": true
                            },
                            {
                                "title": "sleep(in:for:)",
                                "path": "/documentation/slothcreator/sloth/sleep(in:for:)",
                                "type": "method",
                                "deprecated": true
                            }
                        ]
                    },
                    { "title": "Tutorials", "type": "groupMarker" },
                    {
                        "title": "Meet SlothCreator",
                        "path": "/tutorials/slothcreator/meet",
                        "type": "tutorial"
                    }
                ]
            }
        ],
        "occ": [
            {
                "title": "SlothCreator",
                "path": "/documentation/slothcreator",
                "type": "module",
                "beta": true,
                "children": [
                    {
                        "title": "SCSloth",
                        "path": "/documentation/slothcreator/scsloth",
                        "type": "class",
                        "beta": true
                    }
                ]
            }
        ]
    },
    "references": {},
    "includedArchiveIdentifiers": ["SlothCreator"]
}"#;

pub fn document() -> IndexDocument {
    IndexDocument::from_json(INDEX_JSON).unwrap()
}

pub fn find<'a>(entries: &'a [FlatIndexEntry], title: &str) -> &'a FlatIndexEntry {
    entries
        .iter()
        .find(|entry| entry.title == title)
        .unwrap_or_else(|| panic!("no entry titled {title}"))
}

pub fn uid(entries: &[FlatIndexEntry], title: &str) -> Uid {
    find(entries, title).uid
}

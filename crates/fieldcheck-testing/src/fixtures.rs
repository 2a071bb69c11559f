//! Canned `<rpc-reply>` documents in the shapes Junos-style devices emit.
//!
//! Real devices collapse a single occurrence of a repeated element to a
//! bare element and emit siblings for multiples, so the builders here do
//! the same: one instance/neighbor produces an object-shaped tree after
//! conversion, several produce arrays.

use std::fmt::Write;

/// OSPF neighbor reply with a single routing instance.
/// `neighbors` is a list of `(interface-name, ospf-neighbor-state)` pairs.
pub fn ospf_reply(neighbors: &[(&str, &str)]) -> String {
    ospf_reply_instances(&[("master", neighbors)])
}

/// OSPF neighbor reply spanning several routing instances.
pub fn ospf_reply_instances(instances: &[(&str, &[(&str, &str)])]) -> String {
    let mut xml = String::from("<rpc-reply><ospf-neighbor-information-all>");
    for (instance_name, neighbors) in instances {
        write!(
            xml,
            "<ospf-instance-neighbor><ospf-instance-name>{}</ospf-instance-name>",
            instance_name
        )
        .expect("writing to String cannot fail");
        for (index, (interface, state)) in neighbors.iter().enumerate() {
            write!(
                xml,
                "<ospf-neighbor>\
                   <neighbor-address>10.0.{}.2</neighbor-address>\
                   <interface-name>{}</interface-name>\
                   <ospf-neighbor-state>{}</ospf-neighbor-state>\
                 </ospf-neighbor>",
                index, interface, state
            )
            .expect("writing to String cannot fail");
        }
        xml.push_str("</ospf-instance-neighbor>");
    }
    xml.push_str("</ospf-neighbor-information-all></rpc-reply>");
    xml
}

/// OSPF reply whose envelope key is absent entirely (the shape a device
/// with no OSPF configuration, or changed firmware, can produce).
pub const OSPF_REPLY_NO_ENVELOPE: &str = "<rpc-reply><output>OSPF instance is not running</output></rpc-reply>";

/// Route lookup reply: populated route table when `present`, an empty
/// route-information envelope otherwise.
pub fn route_reply(present: bool) -> String {
    if present {
        "<rpc-reply><route-information><route-table>\
           <table-name>inet.0</table-name>\
           <rt><rt-destination>0.0.0.0/0</rt-destination></rt>\
         </route-table></route-information></rpc-reply>"
            .to_string()
    } else {
        "<rpc-reply><route-information></route-information></rpc-reply>".to_string()
    }
}

/// Route lookup reply with no route-information envelope at all.
pub const ROUTE_REPLY_NO_ENVELOPE: &str = "<rpc-reply><output>unknown command</output></rpc-reply>";

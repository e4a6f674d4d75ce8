#![allow(dead_code)]
use rootwalk_domain::{HeaderFlags, Packet, Record};
use std::net::Ipv4Addr;

/// Response to `query` carrying the given sections, ID copied.
pub fn reply_to(
    query: &Packet,
    answers: Vec<Record>,
    authorities: Vec<Record>,
    additionals: Vec<Record>,
) -> Packet {
    let mut response = Packet {
        questions: query.questions.clone(),
        answers,
        authorities,
        additionals,
        ..Packet::default()
    };
    response.header.id = query.header.id;
    response.header.flags = HeaderFlags::from_bits(HeaderFlags::RESPONSE);
    response.sync_counts().unwrap();
    response
}

pub fn answer_a(query: &Packet, ip: Ipv4Addr) -> Packet {
    let name = query.questions[0].name.clone();
    reply_to(query, vec![Record::a(name, 300, ip)], vec![], vec![])
}

pub fn glue(query: &Packet, nameserver: &str, ip: Ipv4Addr) -> Packet {
    reply_to(
        query,
        vec![],
        vec![Record::ns("test", 3600, nameserver)],
        vec![Record::a(nameserver, 3600, ip)],
    )
}

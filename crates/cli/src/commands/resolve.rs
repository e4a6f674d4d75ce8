use crate::di::DnsServices;
use rootwalk_domain::{Packet, Question, Record, RecordType};

pub async fn run_resolve(
    services: &DnsServices,
    name: &str,
    record_type: RecordType,
) -> anyhow::Result<()> {
    let question = Question::new(name, record_type);
    let response = services.resolve_domain.resolve_packet(&question).await?;
    print_packet(&response);

    if response.find_answer(record_type).is_none() {
        anyhow::bail!("no {} record found for {}", record_type, question.name);
    }
    Ok(())
}

fn print_packet(packet: &Packet) {
    println!(";; id {} flags {}", packet.header.id, packet.header.flags);
    print_section("ANSWER", &packet.answers);
    print_section("AUTHORITY", &packet.authorities);
    print_section("ADDITIONAL", &packet.additionals);
}

fn print_section(title: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }
    println!();
    println!(";; {} SECTION:", title);
    for record in records {
        println!("{}", record);
    }
}

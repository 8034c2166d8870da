use safe_csv_writer::{core::policy::SafetyPolicy, item::csv::csv_writer::SafeCsvWriter};

const RECORDS: [[&str; 3]; 4] = [
    ["userId", "secret", "comment"],
    ["-21+63", "=A1", "foo, bar"],
    ["+42", "\tsecret", "\nplop"],
    ["123", "blablabla", "@foobar"],
];

fn unsafe_csv() -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for record in RECORDS {
        writer.write_record(record)?;
    }
    let data = writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;
    Ok(String::from_utf8(data)?)
}

fn safe_csv(policy: SafetyPolicy) -> anyhow::Result<String> {
    let writer = SafeCsvWriter::new(vec![], policy);
    writer.write_all(RECORDS)?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let force_quoting = SafetyPolicy {
        force_quoting: true,
        ..SafetyPolicy::none()
    };

    println!("Plain CSV writer:\n{}", unsafe_csv()?);
    println!("Safe writer, forced quoting:\n{}", safe_csv(force_quoting)?);
    println!(
        "Safe writer, every character escaped:\n{}",
        safe_csv(SafetyPolicy::ESCAPE_ALL_CHARACTERS)?
    );
    println!(
        "Safe writer, full safety:\n{}",
        safe_csv(SafetyPolicy::FULL_SAFETY)?
    );

    Ok(())
}

use solana_security_txt::security_txt;

security_txt! {
    name: "GoodDollar Identity program",
    project_url: "https://gooddollar.org",
    contacts: "email:security@gooddollar.org",
    policy: "https://gooddollar.org/security"
}

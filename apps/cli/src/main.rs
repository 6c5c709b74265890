fn main() -> anyhow::Result<()> {
    kana_drill::run()
}

fn main() -> eyre::Result<()> {
    site_icons::main()
}

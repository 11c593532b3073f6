fn main() -> whiteout::Result<()> {
    whiteout::run(wild::args_os())
}

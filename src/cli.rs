use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "snapdel")]
#[command(version)]
#[command(about = "Remove one or more snapshots from an instance", long_about = None)]
pub struct Cli {
    /// 인스턴스 (이름, 짧은 ID 또는 UUID)
    #[arg(value_name = "INST")]
    pub container: String,

    /// 삭제할 스냅샷 이름
    #[arg(value_name = "SNAPNAME", required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Skip confirmation of delete.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Wait for the deletion to complete. Use multiple times for a spinner.
    #[arg(short = 'w', long, action = ArgAction::Count)]
    pub wait: u8,

    /// CloudAPI 주소 (설정 파일/SNAPDEL_URL 대신 사용)
    #[arg(long)]
    pub url: Option<String>,

    /// 계정 (설정 파일/SNAPDEL_ACCOUNT 대신 사용)
    #[arg(short = 'a', long)]
    pub account: Option<String>,

    /// 디버그 로그 출력
    #[arg(short = 'd', long)]
    pub debug: bool,
}
